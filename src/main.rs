use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use storyflow::ai::AiMode;
use storyflow::config::AppSettings;
use storyflow::messages::{AiMsg, DocumentMsg, EditorMsg, Msg};
use storyflow::model::{EditorModel, Script, ScriptId, ScriptLanguage};
use storyflow::pagination::Page;
use storyflow::store::{DocumentStore, FileStore};
use storyflow::update::update;

mod cli;

use cli::{anchor_index, CliArgs, Command, SourceRef};

const PREVIEW_CHARS: usize = 48;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    storyflow::tracing::init();

    let settings = AppSettings::load();
    let mut store = match &args.data_dir {
        Some(dir) => FileStore::open(dir),
        None => FileStore::open_default(),
    }
    .context("Failed to open script store")?;

    match args.command {
        Command::New {
            template,
            language,
            title,
        } => new_script(&mut store, settings, &template, language, title),
        Command::List => list_scripts(&store),
        Command::Pages(source) => {
            let model = EditorModel::new(read_script(&store, source)?, settings);
            print_pages(&model.pages(), &model);
            Ok(())
        }
        Command::Outline(source) => {
            let model = EditorModel::new(read_script(&store, source)?, settings);
            for scene in model.outline() {
                let page = scene.page.map_or("-".to_string(), |p| p.to_string());
                println!("{:>3}. {}  (p. {})", scene.number, scene.title, page);
            }
            Ok(())
        }
        Command::Accept {
            id,
            anchor,
            mode,
            input,
        } => accept(&mut store, settings, ScriptId(id), anchor, mode, &input),
        Command::Delete { id } => {
            let id = ScriptId(id);
            store
                .delete(&id)
                .with_context(|| format!("Failed to delete script {}", id))?;
            println!("Deleted {}", id);
            Ok(())
        }
    }
}

fn new_script(
    store: &mut FileStore,
    settings: AppSettings,
    template: &str,
    language: ScriptLanguage,
    title: Option<String>,
) -> Result<()> {
    let mut model = EditorModel::with_default_script(settings);
    update(
        &mut model,
        Msg::Document(DocumentMsg::NewFromTemplate {
            template_id: template.to_string(),
            language,
        }),
    );
    if let Some(title) = title {
        let mut metadata = model.script.metadata.clone();
        metadata.title = title;
        update(&mut model, Msg::Document(DocumentMsg::SetMetadata(metadata)));
    }

    store
        .save(&model.script)
        .context("Failed to save new script")?;
    println!("{}", model.script.id);
    Ok(())
}

fn list_scripts(store: &FileStore) -> Result<()> {
    let summaries = store.list().context("Failed to list scripts")?;
    if summaries.is_empty() {
        println!("No scripts in {}", store.root().display());
    }
    for summary in summaries {
        println!("{}\t{}\t{}", summary.id, summary.last_modified, summary.title);
    }
    Ok(())
}

fn read_script(store: &FileStore, source: cli::ScriptSource) -> Result<Script> {
    match source.resolve().map_err(|e| anyhow!(e))? {
        SourceRef::Stored(id) => store
            .load(&id)
            .with_context(|| format!("Failed to load script {}", id)),
        SourceRef::File(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse script {}", path.display()))
        }
    }
}

fn print_pages(pages: &[Page], model: &EditorModel) {
    let capacity = model.layout.page_capacity;
    for page in pages {
        println!(
            "Page {} ({}/{}, {} blocks)",
            page.number,
            page.height,
            capacity,
            page.blocks.len()
        );
        for block in &page.blocks {
            let mut preview: String = block.content.chars().take(PREVIEW_CHARS).collect();
            if block.char_len() > PREVIEW_CHARS {
                preview.push('…');
            }
            println!("  {:>5} {:<14} {}", block.id, block.block_type, preview.replace('\n', " "));
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read suggestion from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn accept(
    store: &mut FileStore,
    settings: AppSettings,
    id: ScriptId,
    anchor: Option<usize>,
    mode: AiMode,
    input: &Path,
) -> Result<()> {
    let script = store
        .load(&id)
        .with_context(|| format!("Failed to load script {}", id))?;
    let text = read_input(input)?;

    let mut model = EditorModel::new(script, settings);
    match anchor {
        Some(n) => {
            let idx = anchor_index(n, model.blocks().len()).map_err(|e| anyhow!(e))?;
            let block_id = model.blocks()[idx].id;
            update(&mut model, Msg::Editor(EditorMsg::Focus(block_id)));
        }
        None => {
            update(&mut model, Msg::Editor(EditorMsg::Blur));
        }
    }

    let before = model.blocks().len();
    update(&mut model, Msg::Ai(AiMsg::SetMode(mode)));
    update(&mut model, Msg::Ai(AiMsg::Offer(text)));
    update(&mut model, Msg::Ai(AiMsg::Accept));

    store
        .save(&model.script)
        .with_context(|| format!("Failed to save script {}", id))?;
    println!(
        "{}: {} -> {} blocks",
        model.script.id,
        before,
        model.blocks().len()
    );
    Ok(())
}
