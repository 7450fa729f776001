//! Benchmarks for pagination and block editing hot paths
//!
//! Run with: cargo bench pagination

mod support;
use support::{make_blocks, make_model};

use storyflow::ai::{apply_suggestion, AiMode};
use storyflow::keymap::{KeyCode, Keystroke};
use storyflow::layout::LayoutProfile;
use storyflow::messages::{EditorMsg, Msg};
use storyflow::model::BlockIdGenerator;
use storyflow::pagination::{estimate_block_height, paginate};
use storyflow::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Pagination
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn paginate_script(bencher: divan::Bencher, blocks: usize) {
    let blocks = make_blocks(blocks);
    let profile = LayoutProfile::STANDARD;
    bencher.bench(|| paginate(divan::black_box(&blocks), &profile));
}

#[divan::bench]
fn estimate_heights_mixed() {
    let blocks = make_blocks(600);
    let profile = LayoutProfile::STANDARD;
    let total: u32 = blocks
        .iter()
        .map(|b| estimate_block_height(b, &profile))
        .sum();
    divan::black_box(total);
}

// ============================================================================
// Editing transitions (each one repaginates in the host)
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn enter_then_repaginate(bencher: divan::Bencher, blocks: usize) {
    bencher
        .with_inputs(|| make_model(blocks))
        .bench_local_values(|mut model| {
            update(
                &mut model,
                Msg::Editor(EditorMsg::Key {
                    stroke: Keystroke::key(KeyCode::Enter),
                    caret: 0,
                }),
            );
            divan::black_box(model.pages());
        });
}

#[divan::bench(args = [1_000, 10_000])]
fn accept_tagged_suggestion(bencher: divan::Bencher, blocks: usize) {
    let text = "[SCENE] EXT. DOCKS - DAWN\n[ACTION] Fog rolls in.\n[CHARACTER] MARLOWE\n[DIALOGUE] Too quiet.";
    let blocks = make_blocks(blocks);
    let anchor = blocks.get(blocks.len() / 2).map(|b| b.id);

    bencher.bench_local(|| {
        let mut ids = BlockIdGenerator::new();
        ids.observe(&blocks);
        apply_suggestion(&blocks, anchor, divan::black_box(text), AiMode::Continue, &mut ids)
    });
}
