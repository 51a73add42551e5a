use anyhow::{Context, Result};
use std::io;
use unlink_md::{
    Config, Editor, FileEditor, StreamEditor, read_document, remove_from_file,
    remove_from_selection,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match config.input_path() {
        Some(path) if config.stdout => {
            let text = read_document(path)?;
            let mut editor = StreamEditor::new(text, io::stdout()).quiet(config.quiet);
            run(&mut editor, &config)
        }
        Some(path) => {
            let mut editor = FileEditor::open(path)?.quiet(config.quiet);
            run(&mut editor, &config)
        }
        None => {
            let mut editor = StreamEditor::from_stdin()?.quiet(config.quiet);
            run(&mut editor, &config)
        }
    }
}

/// Runs the configured command against `editor` and saves the result.
fn run(editor: &mut dyn Editor, config: &Config) -> Result<()> {
    let outcome = match config.lines {
        Some(range) => remove_from_selection(editor, range),
        None => remove_from_file(editor),
    };
    log::debug!("Command finished: {:?}", outcome);

    editor.save().context("Failed to save document")
}
