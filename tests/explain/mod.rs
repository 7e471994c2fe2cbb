mod tests_explain_pipeline;
