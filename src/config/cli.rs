use crate::core::{Console, Storage};
use crate::utils::error::{BookingError, Result};
use std::fs;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Line-oriented terminal over tokio stdin/stdout. A single buffered reader
/// is shared behind a mutex so consecutive prompts never lose buffered input.
pub struct StdioConsole {
    reader: Mutex<BufReader<Stdin>>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    async fn prompt(&self, message: &str) -> Result<String> {
        use std::io::Write;
        print!("{}", message);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = self.reader.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Err(BookingError::InputClosedError);
        }
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    async fn say(&self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }
}
