use std::io::{self, Write};

use anyhow::Context;
use garden::{
    config::ShellConfig,
    notify::TerminalNotifier,
    shell::{self, Command, Flow},
    storage::FileStorage,
    GardenWidget,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::from_env();
    let storage = FileStorage::open(&config.storage_path).with_context(|| {
        format!("opening garden storage at {}", config.storage_path.display())
    })?;
    let notifier =
        TerminalNotifier::new(tokio::runtime::Handle::current()).with_delay(config.alert_delay);
    let mut widget = GardenWidget::mount(storage, notifier);

    println!("🌱 Welcome to the virtual garden!");
    println!("   Pick a plot to plant a seed and watch the garden grow.");
    println!("   Storage → {}", config.storage_path.display());
    println!("   Type `help` for commands.");
    println!();
    println!("{}", shell::render(&widget));

    let stdin = io::stdin();
    loop {
        print!("\ngarden> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match line.parse::<Command>() {
            Ok(command) => match shell::execute(&mut widget, command) {
                Flow::Continue(text) if text.is_empty() => {}
                Flow::Continue(text) => println!("{text}"),
                Flow::Quit => break,
            },
            Err(shell::ParseCommandError::Empty) => {}
            Err(err) => println!("{err}\n{}", shell::HELP),
        }
    }

    println!("Bye! 🌻");
    Ok(())
}
