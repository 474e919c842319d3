fn main() {
    if let Err(e) = safe_paste_parser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
