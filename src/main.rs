fn main() {
    stringier::cli::main();
}
