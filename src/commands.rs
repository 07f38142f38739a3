use crate::error::AppError;
use crate::navigation::Route;

pub const HELP: &str = "\
Commands:
  set <field> <value...>   fill a form field (email, password, name,
                           mata_kuliah, tugas_ke, tenggat_kumpul)
  submit                   submit the current form
  refresh                  reload the list
  edit <n|id>              edit a task (Tugas tab)
  delete <n|id>            delete a task (Tugas tab)
  cancel                   clear the task form
  logout                   log out (Profile tab)
  goto <screen>            login, register, home, tugas, profile
  back                     previous screen
  show                     redraw the current screen
  help                     this text
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: String, value: String },
    Submit,
    Refresh,
    Edit(String),
    Delete(String),
    Cancel,
    Logout,
    Goto(Route),
    Back,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(usage("set <field> <value...>"));
                }
                Command::Set {
                    field: field.to_ascii_lowercase(),
                    value: value.trim().to_string(),
                }
            }
            "submit" => Command::Submit,
            "refresh" => Command::Refresh,
            "edit" => Command::Edit(required_arg(rest, "edit <n|id>")?),
            "delete" | "rm" => Command::Delete(required_arg(rest, "delete <n|id>")?),
            "cancel" => Command::Cancel,
            "logout" => Command::Logout,
            "goto" | "tab" => {
                let name = required_arg(rest, "goto <screen>")?;
                let route = Route::parse(&name)
                    .ok_or_else(|| AppError::Validation(format!("Unknown screen: {}", name)))?;
                Command::Goto(route)
            }
            "back" => Command::Back,
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(AppError::Validation(format!(
                    "Unknown command: {} (try `help`)",
                    other
                )));
            }
        };
        Ok(command)
    }
}

fn required_arg(rest: &str, usage_text: &str) -> Result<String, AppError> {
    if rest.is_empty() {
        Err(usage(usage_text))
    } else {
        Ok(rest.to_string())
    }
}

fn usage(text: &str) -> AppError {
    AppError::Validation(format!("Usage: {}", text))
}
