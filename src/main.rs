fn main() {
    if let Err(err) = sim_import::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
