mod tests_message;
mod tests_panel;
