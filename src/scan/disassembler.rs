use std::io;
use std::path::Path;
use std::process::Command;

// External class-inspection tool, invoked once per class file. The command's
// output grammar is treated as a black box; callers pattern-match the text.
pub struct Disassembler {
    command: String,
    args: Vec<String>,
}

impl Disassembler {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Disassembler {
            command: command.into(),
            args,
        }
    }

    pub fn javap() -> Self {
        Disassembler::new("javap", vec!["-private".to_string()])
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn run(&self, class_file: &Path) -> io::Result<String> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(class_file)
            .output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {} for {:?}: {}",
                self.command,
                output.status,
                class_file,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_an_error() {
        let disassembler = Disassembler::new("jarscan-no-such-tool", Vec::new());
        let result = disassembler.run(Path::new("Foo.class"));
        assert!(result.is_err());
    }
}
