pub mod table_printer;
pub mod width_util;
