mod temp_token_tests;
