mod tests_parser;
