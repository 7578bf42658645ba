//! End-to-end icon rendering over the built-in relic table.
//!
//! All tests use the built-in bitmap font so results do not depend on the
//! fonts installed on the machine.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use relicgen_backend_icon::png::{hash_png, write_rgba};
use relicgen_backend_icon::{generate_icon, render_icon_png, FontChain, PngConfig, ICON_SIZE};
use relicgen_spec::{Category, RelicTable};

const CHIPS: [u8; 4] = [22, 101, 52, 255];
const MULT: [u8; 4] = [133, 77, 14, 255];

fn fonts() -> FontChain {
    FontChain::builtin_only()
}

// ============================================================================
// Table-wide Tests
// ============================================================================

/// Every built-in entry renders to a 256x256 RGBA PNG.
#[test]
fn test_every_builtin_icon_decodes() {
    let fonts = fonts();
    let config = PngConfig::default();

    for relic in &RelicTable::builtin() {
        let result = render_icon_png(relic, &fonts, &config).unwrap();
        let decoded = image::load_from_memory(&result.png_data)
            .unwrap_or_else(|e| panic!("{} did not decode: {}", relic.id, e));

        assert_eq!(decoded.color(), image::ColorType::Rgba8, "{}", relic.id);
        assert_eq!((decoded.width(), decoded.height()), (ICON_SIZE, ICON_SIZE));
    }
}

/// No two entries render the same picture.
#[test]
fn test_builtin_icons_are_distinct() {
    let fonts = fonts();
    let config = PngConfig::default();
    let table = RelicTable::builtin();

    let hashes: HashSet<String> = table
        .iter()
        .map(|relic| render_icon_png(relic, &fonts, &config).unwrap().hash)
        .collect();
    assert_eq!(hashes.len(), table.len());
}

// ============================================================================
// Background Tests
// ============================================================================

/// Solid icons keep their category color along the uncovered top edge.
#[test]
fn test_solid_background_corners() {
    let fonts = fonts();

    for relic in RelicTable::builtin().iter().filter(|r| !r.gradient) {
        let icon = generate_icon(relic, &fonts).unwrap();
        let expected = match relic.category {
            Category::Chips => CHIPS,
            Category::Mult => MULT,
        };
        assert_eq!(icon.get(0, 0).to_rgba8(), expected, "{}", relic.id);
        assert_eq!(icon.get(ICON_SIZE - 1, 0).to_rgba8(), expected, "{}", relic.id);
    }
}

/// The gradient runs from chips green at bottom-left to mult brown at
/// top-right.
#[test]
fn test_gradient_icon_corners() {
    let table = RelicTable::builtin();
    let relic = table.get("rank_pair_chips").unwrap();
    assert!(relic.gradient);

    let icon = generate_icon(relic, &fonts()).unwrap();
    assert_eq!(icon.get(0, ICON_SIZE - 1).to_rgba8(), CHIPS);
    assert_eq!(icon.get(ICON_SIZE - 1, 0).to_rgba8(), MULT);
}

// ============================================================================
// Card Tests
// ============================================================================

/// Cards are white with black outlines, so both show up on every icon.
#[test]
fn test_cards_are_visible() {
    let fonts = fonts();

    for relic in &RelicTable::builtin() {
        let icon = generate_icon(relic, &fonts).unwrap();
        let pixels: Vec<[u8; 4]> = icon.data.iter().map(|c| c.to_rgba8()).collect();

        assert!(pixels.contains(&[255, 255, 255, 255]), "{} has no card fill", relic.id);
        assert!(pixels.contains(&[0, 0, 0, 255]), "{} has no outline", relic.id);
    }
}

/// Flush icons show their suit color.
#[test]
fn test_flush_icons_show_suit_color() {
    let table = RelicTable::builtin();
    let fonts = fonts();

    let hearts = generate_icon(table.get("flush_pair_chips").unwrap(), &fonts).unwrap();
    assert!(hearts.data.iter().any(|c| c.to_rgba8() == [231, 76, 60, 255]));

    let rank_pair = generate_icon(table.get("rank_pair_mult").unwrap(), &fonts).unwrap();
    assert!(!rank_pair.data.iter().any(|c| c.to_rgba8() == [231, 76, 60, 255]));
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Rendering the same entry twice yields identical bytes.
#[test]
fn test_rendering_is_deterministic() {
    let table = RelicTable::builtin();
    let relic = table.get("flush_run_mult").unwrap();
    let config = PngConfig::default();

    let first = render_icon_png(relic, &fonts(), &config).unwrap();
    let second = render_icon_png(relic, &fonts(), &config).unwrap();

    assert_eq!(first.hash, second.hash);
    assert!(first.png_data == second.png_data);
}

/// Writing to disk produces the same bytes as encoding in memory.
#[test]
fn test_file_matches_memory_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let table = RelicTable::builtin();
    let relic = table.get("straight_triple_chips").unwrap();
    let config = PngConfig::default();

    let icon = generate_icon(relic, &fonts()).unwrap();
    let path = dir.path().join(relic.file_name());
    write_rgba(&icon, &path, &config).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    let in_memory = render_icon_png(relic, &fonts(), &config).unwrap();
    assert_eq!(hash_png(&on_disk), in_memory.hash);
}
