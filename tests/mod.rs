mod support;

mod validation_tests;
