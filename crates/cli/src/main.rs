//! Interactive menu for the bottle inventory.
//!
//! All console IO lives here; the domain crate only ever sees parsed,
//! validated values and returns confirmations or domain errors to render.

mod input;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chrono::Utc;

use bottlekeep_core::ItemId;
use bottlekeep_inventory::{ContainerSize, Inventory, Item, ItemPatch, NewItem};

fn main() -> anyhow::Result<()> {
    bottlekeep_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<()> {
    let mut inventory = Inventory::new();

    loop {
        write_menu(out)?;
        // EOF quits like choice 0
        let Some(choice) = read_line(input)? else { break };
        match choice.trim() {
            "1" => add_flow(input, out, &mut inventory)?,
            "2" => remove_flow(input, out, &mut inventory)?,
            "3" => edit_flow(input, out, &mut inventory)?,
            "4" => list_items(out, &inventory)?,
            "5" => list_flagged(out, &inventory)?,
            "6" => show_counts(out, &inventory)?,
            "7" => show_total(out, &inventory)?,
            "8" => {
                inventory.flag_breakage();
                tracing::info!("breakage flagged");
                writeln!(out, "Breakage flagged: every add from now on is also recorded as damaged stock.")?;
            }
            "9" => dump_json(out, &inventory)?,
            "0" => break,
            other => writeln!(out, "Unrecognised choice '{other}'.")?,
        }
    }

    writeln!(out, "Goodbye.")?;
    Ok(())
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== bottlekeep ===")?;
    writeln!(out, "1) Add item")?;
    writeln!(out, "2) Remove item by id")?;
    writeln!(out, "3) Edit item by name")?;
    writeln!(out, "4) List items")?;
    writeln!(out, "5) List flagged breakage")?;
    writeln!(out, "6) Counts by type")?;
    writeln!(out, "7) Total count")?;
    writeln!(out, "8) Flag breakage")?;
    writeln!(out, "9) Dump items as JSON")?;
    writeln!(out, "0) Quit")?;
    write!(out, "> ")?;
    out.flush()
}

/// Read one line; `None` means the input stream is closed.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    read_line(input)
}

/// Prompt until the line parses; `None` means the input stream is closed.
fn prompt_parsed<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    message: &str,
    parse: F,
) -> anyhow::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let Some(line) = prompt(input, out, message)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(reason) => writeln!(out, "{reason}")?,
        }
    }
}

fn add_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    inventory: &mut Inventory,
) -> anyhow::Result<()> {
    let Some(name) = prompt_parsed(input, out, "Name: ", input::required_text)? else {
        return Ok(());
    };
    let Some(style) = prompt_parsed(input, out, "Style: ", input::required_text)? else {
        return Ok(());
    };
    let Some(strength) = prompt_parsed(input, out, "Alcohol content (%): ", input::parse_strength)?
    else {
        return Ok(());
    };
    let Some(is_metric) =
        prompt_parsed(input, out, "Metric units? (1 = ml, 0 = fl oz): ", input::parse_metric_flag)?
    else {
        return Ok(());
    };
    let Some(size) = prompt_parsed(input, out, "Container size: ", input::parse_size)? else {
        return Ok(());
    };
    let Some(quantity) =
        prompt_parsed(input, out, "Quantity: ", input::parse_positive_quantity)?
    else {
        return Ok(());
    };
    let Some(barcode) = prompt_parsed(input, out, "Barcode (12 digits): ", input::parse_barcode)?
    else {
        return Ok(());
    };

    let candidate = NewItem {
        style,
        name,
        strength_percent: strength,
        size: ContainerSize::new(is_metric, size),
        quantity,
        barcode,
    };

    match inventory.add(candidate, Utc::now()) {
        Ok(added) => {
            tracing::info!(id = %added.id, name = %added.name, quantity = added.quantity, "item added");
            writeln!(
                out,
                "{} bottles of {} added to stock (id {}).",
                added.quantity, added.name, added.id
            )?;
            if added.breakage_flagged {
                writeln!(out, "Breakage was flagged while adding; the add is recorded as damaged stock.")?;
            }
        }
        Err(err) => {
            tracing::warn!(%err, "add rejected");
            writeln!(out, "{err}")?;
        }
    }
    Ok(())
}

fn remove_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    inventory: &mut Inventory,
) -> anyhow::Result<()> {
    let Some(id) = prompt_parsed(input, out, "Item id: ", input::parse_id)? else {
        return Ok(());
    };

    match inventory.remove_by_id(ItemId::new(id)) {
        Ok(removed) => {
            tracing::info!(id = %removed.id, name = %removed.name, "item removed");
            writeln!(
                out,
                "Removed {} bottles of {} (id {}).",
                removed.quantity, removed.name, removed.id
            )?;
        }
        Err(err) => {
            tracing::warn!(%err, id, "remove rejected");
            writeln!(out, "No item with id {id}.")?;
        }
    }
    Ok(())
}

fn edit_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    inventory: &mut Inventory,
) -> anyhow::Result<()> {
    let Some(target) = prompt_parsed(input, out, "Name of the item to edit: ", input::required_text)?
    else {
        return Ok(());
    };

    writeln!(out, "Blank keeps the current value.")?;
    let Some(name) = prompt(input, out, "New name: ")? else {
        return Ok(());
    };
    let Some(style) = prompt(input, out, "New style: ")? else {
        return Ok(());
    };
    let Some(strength) = prompt_parsed(input, out, "New alcohol content (%): ", |s| {
        input::optional(s, input::parse_strength)
    })?
    else {
        return Ok(());
    };
    let Some(is_metric) =
        prompt_parsed(input, out, "Metric units? (1 = ml, 0 = fl oz): ", |s| {
            input::optional(s, input::parse_metric_flag)
        })?
    else {
        return Ok(());
    };
    let Some(size) = prompt_parsed(input, out, "New container size: ", |s| {
        input::optional(s, input::parse_size)
    })?
    else {
        return Ok(());
    };
    let Some(quantity) = prompt_parsed(input, out, "New quantity: ", |s| {
        input::optional(s, input::parse_non_negative_quantity)
    })?
    else {
        return Ok(());
    };
    let Some(barcode) = prompt_parsed(input, out, "New barcode (12 digits): ", |s| {
        input::optional(s, input::parse_barcode)
    })?
    else {
        return Ok(());
    };

    let patch = ItemPatch {
        name: input::optional_text(&name),
        style: input::optional_text(&style),
        strength_percent: strength,
        size,
        is_metric,
        quantity,
        barcode,
    };

    match inventory.edit(&target, patch, Utc::now()) {
        Ok(edited) => {
            tracing::info!(id = %edited.id, name = %edited.name, "item edited");
            writeln!(out, "Item details updated (id {}, name {}).", edited.id, edited.name)?;
        }
        Err(err) => {
            tracing::warn!(%err, %target, "edit rejected");
            writeln!(out, "{err}")?;
        }
    }
    Ok(())
}

fn list_items<W: Write>(out: &mut W, inventory: &Inventory) -> anyhow::Result<()> {
    if inventory.items().is_empty() {
        writeln!(out, "No items in stock.")?;
        return Ok(());
    }
    writeln!(out, "List of stocked items:")?;
    for item in inventory.items() {
        render_item(out, item)?;
    }
    Ok(())
}

fn render_item<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "Id: {}", item.id_typed())?;
    writeln!(out, "Name: {}", item.name())?;
    writeln!(out, "Style: {}", item.style())?;
    writeln!(out, "Alcohol content: {}%", item.strength_percent())?;
    writeln!(out, "Container size: {}", item.size())?;
    writeln!(out, "Quantity: {} bottles", item.quantity())?;
    writeln!(out, "Barcode: {}", item.barcode())?;
    writeln!(out, "Last updated: {}", item.last_updated().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "-----------------------")
}

fn list_flagged<W: Write>(out: &mut W, inventory: &Inventory) -> anyhow::Result<()> {
    if inventory.flagged_breakage().is_empty() {
        writeln!(out, "No bottles flagged for breakage.")?;
        return Ok(());
    }
    writeln!(out, "Adds recorded as damaged stock:")?;
    for entry in inventory.flagged_breakage() {
        writeln!(out, "{}: {} bottles", entry.name, entry.quantity)?;
    }
    writeln!(out, "Total breakage: {} bottles", inventory.breakage_total())?;
    Ok(())
}

fn show_counts<W: Write>(out: &mut W, inventory: &Inventory) -> anyhow::Result<()> {
    if inventory.counts_by_type().is_empty() {
        writeln!(out, "Nothing has been added yet.")?;
        return Ok(());
    }
    writeln!(out, "Counts by type:")?;
    for (name, count) in inventory.counts_by_type() {
        writeln!(out, "{name}: {count} bottles")?;
    }
    Ok(())
}

fn show_total<W: Write>(out: &mut W, inventory: &Inventory) -> anyhow::Result<()> {
    match inventory.total_count() {
        Ok(total) => writeln!(out, "Total bottles in stock: {total}.")?,
        Err(_) => writeln!(out, "Nothing has been added yet.")?,
    }
    Ok(())
}

fn dump_json<W: Write>(out: &mut W, inventory: &Inventory) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(inventory.items()).context("serializing items")?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(&mut script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scripted_add_shows_up_in_total() {
        let script = "1\nExample IPA\nIPA\n6.5\n1\n355\n24\n036000291452\n7\n0\n";
        let output = run_script(script);
        assert!(output.contains("24 bottles of Example IPA added to stock (id 1)."));
        assert!(output.contains("Total bottles in stock: 24."));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn invalid_quantity_reprompts_instead_of_failing() {
        // "zero" and "0" are both rejected at the prompt, then 12 is accepted
        let script = "1\nSample Stout\nStout\n7.0\n0\n12\nzero\n0\n12\n036000291452\n7\n0\n";
        let output = run_script(script);
        assert!(output.contains("quantity must be a positive value"));
        assert!(output.contains("12 bottles of Sample Stout added to stock"));
    }

    #[test]
    fn unknown_menu_choice_is_reported() {
        let output = run_script("x\n0\n");
        assert!(output.contains("Unrecognised choice 'x'."));
    }

    #[test]
    fn eof_quits_cleanly() {
        let output = run_script("");
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn remove_of_unknown_id_is_reported() {
        let output = run_script("2\n5\n0\n");
        assert!(output.contains("No item with id 5."));
    }
}
