mod cookie_file_provider_test;
