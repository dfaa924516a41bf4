mod bounds_tests;
mod line_tests;
mod rectangle_tests;
mod triangle_tests;
