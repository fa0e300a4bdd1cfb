mod prompt_templates_test;
