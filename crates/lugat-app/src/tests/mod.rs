mod view_tests;
