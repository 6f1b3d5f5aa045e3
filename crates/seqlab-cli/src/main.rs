mod command;
mod data;
mod plot;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
