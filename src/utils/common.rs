// define static exit codes and message
pub const EXIT_CODE_USAGE: i32 = 101;
pub const EXIT_CODE_QUERY_FAILED: i32 = 102;
pub const EXIT_CODE_NO_RESULTS: i32 = 103;
pub const EXIT_CODE_OUTPUT_FAILED: i32 = 104;

pub fn print_error(error: &str, error_code: i32) -> ! {
    if error.to_lowercase().starts_with("warning") {
        println!("[❕] {}", error);
    } else {
        println!("[‼️] {}", error);
    }
    std::process::exit(error_code);
}
