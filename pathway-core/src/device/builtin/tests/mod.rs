mod clean_path_tests;
