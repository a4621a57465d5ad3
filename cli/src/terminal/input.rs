use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::mprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "run" => Ok(MenuChoice::Run),
            "e" | "exit" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid choice: '{other}'")),
        }
    }
}

/// Leaves raw mode however the key read ends.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Reads one menu answer.
///
/// On a terminal a single key press is enough; piped input is read line by
/// line. `None` means input is closed (EOF or Ctrl+C).
pub fn read_choice(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let answer = if io::stdin().is_terminal() {
        read_key()?
    } else {
        read_line()?
    };

    mprint!();
    Ok(answer)
}

fn read_key() -> anyhow::Result<Option<String>> {
    let _guard = RawModeGuard::enable()?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let is_ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if is_ctrl_c {
            return Ok(None);
        }

        match key_event.code {
            KeyCode::Char(c) => {
                print!("{c}");
                io::stdout().flush()?;
                return Ok(Some(c.to_string()));
            }
            KeyCode::Enter => return Ok(Some(String::new())),
            _ => continue,
        }
    }
}

fn read_line() -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read: usize = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_keys() {
        assert_eq!("r".parse::<MenuChoice>(), Ok(MenuChoice::Run));
        assert_eq!(" R \n".parse::<MenuChoice>(), Ok(MenuChoice::Run));
        assert_eq!("run".parse::<MenuChoice>(), Ok(MenuChoice::Run));
        assert_eq!("E".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("exit\r\n".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_anything_else() {
        assert!("".parse::<MenuChoice>().is_err());
        assert!("x".parse::<MenuChoice>().is_err());
        assert!("re".parse::<MenuChoice>().is_err());
    }
}
