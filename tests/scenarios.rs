//! End-to-end sessions through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use microshell::config::ShellLimits;
use microshell::fs::{NodeKind, WELCOME_TEXT};
use microshell::shell::{CommandShell, ContentArea, HostRequest, KeyEvent, SharedFs};
use microshell::{Config, VirtualFileSystem};

fn boot(config: &Config) -> (SharedFs, CommandShell) {
    let fs = VirtualFileSystem::seeded(config.fs.clone()).unwrap();
    let fs = Rc::new(RefCell::new(fs));
    let shell = CommandShell::new(Rc::clone(&fs), config);
    (fs, shell)
}

fn run(shell: &mut CommandShell, line: &str) -> Option<HostRequest> {
    shell.type_text(line).unwrap();
    shell.handle_key(KeyEvent::Enter).unwrap()
}

fn output_since(shell: &CommandShell, start: usize) -> Vec<String> {
    shell.lines()[start..].to_vec()
}

#[test]
fn fresh_system_layout() {
    let (fs, _) = boot(&Config::default());
    let fs = fs.borrow();
    let names: Vec<String> = fs.list("/").into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["home", "system", "apps"]);
    assert_eq!(fs.read("/home/welcome.txt").unwrap(), WELCOME_TEXT.as_bytes());
}

#[test]
fn navigate_up_and_down() {
    let (fs, mut shell) = boot(&Config::default());
    run(&mut shell, "cd /home");
    assert_eq!(fs.borrow().current_path(), "/home");
    run(&mut shell, "cd ..");
    assert_eq!(fs.borrow().current_path(), "/");

    let start = shell.lines().len();
    run(&mut shell, "pwd");
    assert_eq!(output_since(&shell, start), vec!["> pwd", "/"]);
}

#[test]
fn edits_from_the_host_are_visible_to_the_shell() {
    let (fs, mut shell) = boot(&Config::default());
    run(&mut shell, "nedir /home/notes");
    run(&mut shell, "touch /home/notes/todo.txt");
    let request = run(&mut shell, "edit /home/notes/todo.txt");
    assert_eq!(
        request,
        Some(HostRequest::OpenEditor("/home/notes/todo.txt".to_string()))
    );

    // The host's editor writes through the same handle.
    fs.borrow_mut().write("/home/notes/todo.txt", b"buy milk").unwrap();

    let start = shell.lines().len();
    run(&mut shell, "view /home/notes/todo.txt");
    let out = output_since(&shell, start);
    assert_eq!(out[1], "Viewing file:");
    assert!(out.contains(&"buy milk".to_string()));
    assert_eq!(fs.borrow().size_at("/home/notes").unwrap(), 8);
}

#[test]
fn move_then_remove() {
    let (fs, mut shell) = boot(&Config::default());
    fs.borrow_mut().create("/apps/tool", NodeKind::File).unwrap();
    run(&mut shell, "mv /apps/tool /system/tool");
    assert!(fs.borrow().resolve("/apps/tool").is_err());
    assert!(fs.borrow().resolve("/system/tool").is_ok());

    run(&mut shell, "rm /home");
    assert!(fs.borrow().resolve("/home/welcome.txt").is_ok());
    run(&mut shell, "rm -r /home");
    assert!(fs.borrow().resolve("/home").is_err());
}

#[test]
fn reboot_resets_shell_only() {
    let (fs, mut shell) = boot(&Config::default());
    run(&mut shell, "nedir /home/keep");
    assert_eq!(run(&mut shell, "reboot"), Some(HostRequest::Reboot));
    shell.reset();
    assert_eq!(shell.lines().len(), 2);
    assert!(shell.history().is_empty());
    assert!(fs.borrow().resolve("/home/keep").is_ok());
}

#[test]
fn history_keeps_most_recent() {
    let config = Config {
        shell: ShellLimits { max_history: 2, ..ShellLimits::default() },
        ..Config::default()
    };
    let (_, mut shell) = boot(&config);
    for cmd in ["pwd", "ls", "help"] {
        run(&mut shell, cmd);
    }
    shell.history_up();
    assert_eq!(shell.input(), "help");
    shell.history_up();
    assert_eq!(shell.input(), "ls");
    shell.history_up();
    assert_eq!(shell.input(), "ls");
}

#[test]
fn frame_follows_output() {
    let (_, mut shell) = boot(&Config::default());
    // 4 visible lines, 30 characters per line
    let area = ContentArea::new(250, 96);
    shell.render(area);
    for _ in 0..3 {
        run(&mut shell, "pwd");
    }
    let frame = shell.render(area);
    assert_eq!(frame.visible_lines, 4);
    assert_eq!(frame.line_count, 8);
    assert_eq!(frame.scroll_position, 4);
    assert_eq!(frame.lines, vec!["> pwd", "/", "> pwd", "/"]);
    assert!(frame.scrollbar.is_some());
    assert_eq!(frame.cwd, "cwd: /");

    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["prompt"], "> ");
}
