mod indent_test;
mod session_test;
