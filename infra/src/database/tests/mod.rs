mod connection_tests;
mod temp_token_repository_tests;
