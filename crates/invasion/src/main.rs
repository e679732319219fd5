fn main() -> anyhow::Result<()> {
    env_logger::init();
    invasion::run()
}
