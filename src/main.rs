use clap::Parser;
use std::cell::RefCell;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;

use microshell::shell::{CommandShell, ContentArea, HostRequest, KeyEvent};
use microshell::{Config, VirtualFileSystem};

#[derive(Parser)]
#[command(name = "microshell")]
#[command(about = "Run commands against a simulated in-memory shell")]
#[command(version)]
struct Cli {
    /// Execute commands from command line argument, one per line
    #[arg(short = 'c')]
    script: Option<String>,

    /// Content area width in pixels
    #[arg(long = "width", default_value_t = 640)]
    width: u32,

    /// Content area height in pixels
    #[arg(long = "height", default_value_t = 480)]
    height: u32,

    /// TOML file overriding the default limits
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Output the final frame as JSON
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Determine script source: -c, file, or stdin
    let script = if let Some(s) = cli.script {
        s
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        use std::io::IsTerminal;
        if std::io::stdin().is_terminal() {
            eprintln!("Error: No commands provided. Use -c 'commands', provide a script file, or pipe via stdin.");
            std::process::exit(1);
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        buf
    };

    let config = match cli.config {
        Some(ref path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let fs = match VirtualFileSystem::seeded(config.fs.clone()) {
        Ok(fs) => fs,
        Err(e) => {
            eprintln!("Error: Cannot seed filesystem: {}", e);
            std::process::exit(1);
        }
    };

    let area = ContentArea::new(cli.width, cli.height);
    let mut shell = CommandShell::new(Rc::new(RefCell::new(fs)), &config);
    shell.render(area);

    for line in script.lines() {
        if let Err(e) = shell.type_text(line) {
            log::warn!("input truncated: {}", e);
        }
        match shell.handle_key(KeyEvent::Enter) {
            Ok(Some(HostRequest::Reboot)) => {
                log::info!("reboot requested");
                shell.reset();
            }
            Ok(Some(HostRequest::OpenEditor(path))) => {
                log::info!("editor requested for {}", path);
            }
            Ok(None) => {}
            Err(e) => log::warn!("output dropped: {}", e),
        }
        shell.render(area);
    }

    let frame = shell.render(area);
    if cli.json {
        match serde_json::to_string(&frame) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for line in shell.lines() {
            println!("{}", line);
        }
    }
}
