fn main() -> anyhow::Result<()> {
    will_guide::cli::main()
}
