//! Terminal rendering for query results

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use pokedex_core::{Dataset, PokemonRecord, TypeCount};

/// Width of the widest histogram bar, in cells
const BAR_WIDTH: usize = 40;

/// Render the histogram as label, count, and a proportional bar
pub fn histogram(counts: &TypeCount) -> String {
    let pairs = counts.by_count_desc();
    let max = pairs.first().map(|(_, count)| *count).unwrap_or(0).max(1);
    let label_width = pairs
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, count) in &pairs {
        let bar_len = (count * BAR_WIDTH / max).max(1);
        out.push_str(&format!(
            "{label:<label_width$}  {count:>4}  {}\n",
            "█".repeat(bar_len)
        ));
    }
    out
}

/// Render records as a table
pub fn record_table(records: &[&PokemonRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Name", "Type", "Gen", "HP", "Atk", "Def", "SpA", "SpD", "Spe", "Total", "Legendary",
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.type_label()),
            Cell::new(record.generation),
            Cell::new(record.hp),
            Cell::new(record.attack),
            Cell::new(record.defense),
            Cell::new(record.sp_atk),
            Cell::new(record.sp_def),
            Cell::new(record.speed),
            Cell::new(record.stat_total()),
            Cell::new(if record.legendary { "yes" } else { "no" }),
        ]);
    }

    table
}

/// Render a single record's detail block
pub fn record_detail(record: &PokemonRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", record.name));
    out.push_str(&format!("  Type:       {}\n", record.type_label()));
    out.push_str(&format!("  Generation: {}\n", record.generation));
    out.push_str(&format!("  HP:         {}\n", record.hp));
    out.push_str(&format!("  Attack:     {}\n", record.attack));
    out.push_str(&format!("  Defense:    {}\n", record.defense));
    out.push_str(&format!("  Sp. Atk:    {}\n", record.sp_atk));
    out.push_str(&format!("  Sp. Def:    {}\n", record.sp_def));
    out.push_str(&format!("  Speed:      {}\n", record.speed));
    out.push_str(&format!("  Total:      {}\n", record.stat_total()));
    out.push_str(&format!(
        "  Legendary:  {}\n",
        if record.legendary { "yes" } else { "no" }
    ));
    out
}

/// Render the dataset summary: size plus the filterable value ranges
pub fn dataset_summary(dataset: &Dataset) -> String {
    let generations: Vec<String> = dataset
        .generations()
        .iter()
        .map(|g| g.to_string())
        .collect();

    let mut out = String::new();
    out.push_str(&format!("Records:     {}\n", dataset.len()));
    out.push_str(&format!("Generations: {}\n", generations.join(", ")));
    out.push_str(&format!("Types:       {}\n", dataset.type_labels().join(", ")));
    out
}
