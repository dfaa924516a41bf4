mod clipboard_tests;
mod drag_tests;
mod helpers;
mod move_tests;
