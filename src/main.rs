fn main() -> anyhow::Result<()> {
    elm_level_compiler::run()
}
