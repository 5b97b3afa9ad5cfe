//! YASL front-end driver binary.

fn main() {
    let args: Vec<String> = std::env::args().collect();
    std::process::exit(yaslc::run(&args));
}
