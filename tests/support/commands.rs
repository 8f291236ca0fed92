//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a credgate command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - no inherited environment variables
    /// - current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("credgate").expect("failed to find credgate binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run credgate with arbitrary arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run credgate")
    }

    /// Shortcut for `credgate check`.
    pub fn check(&self) -> Output {
        self.run(&["check"])
    }

    /// Shortcut for `credgate check --json`.
    pub fn check_json(&self) -> Output {
        self.run(&["check", "--json"])
    }

    /// Shortcut for `credgate show --json`.
    pub fn show_json(&self) -> Output {
        self.run(&["show", "--json"])
    }

    /// Shortcut for `credgate encrypt` with the payload on stdin.
    pub fn encrypt(&self, payload: &str) -> Output {
        self.cmd()
            .arg("encrypt")
            .write_stdin(payload)
            .output()
            .expect("failed to run credgate encrypt")
    }

    /// Shortcut for `credgate decrypt` with the token on stdin.
    pub fn decrypt(&self, token: &str) -> Output {
        self.cmd()
            .arg("decrypt")
            .write_stdin(token)
            .output()
            .expect("failed to run credgate decrypt")
    }

    /// Shortcut for `credgate mask`.
    pub fn mask(&self, value: &str, visible: i64) -> Output {
        self.run(&["mask", value, "-n", &visible.to_string()])
    }

    /// Shortcut for `credgate keygen`.
    pub fn keygen(&self) -> Output {
        self.run(&["keygen"])
    }
}
