mod tests_rule_analysis;
