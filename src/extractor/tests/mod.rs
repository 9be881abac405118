mod region_tests;
mod array_data_tests;
