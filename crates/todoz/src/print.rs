use colored::Colorize;
use todozapp::dispatch::{CmdMessage, MessageLevel};
use todozapp::model::Filter;
use todozapp::view::{DisplayItem, Projection};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;

/// One listing line: the item plus its position in the full list.
pub(crate) struct ListRow<'a> {
    pub index: usize,
    pub item: &'a DisplayItem,
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_list(rows: &[ListRow<'_>], projection: &Projection) {
    if rows.is_empty() {
        let empty_msg = match projection.filter {
            Filter::All => "No items yet.",
            Filter::Active => "No active items.",
            Filter::Completed => "No completed items.",
        };
        println!("{}", empty_msg);
    } else {
        for row in rows {
            print_row(row);
        }
    }

    println!();
    print_status(projection);
}

fn print_row(row: &ListRow<'_>) {
    let check = if row.item.completed { "[x]" } else { "[ ]" };
    let prefix = format!("{:>3}. {} ", row.index, check);
    let available = LINE_WIDTH.saturating_sub(prefix.width());
    // Truncate before coloring so the width math never sees escape codes
    let text = truncate_to_width(&row.item.text, available);

    if row.item.completed {
        println!("{}{}", prefix.dimmed(), text.dimmed().strikethrough());
    } else if !row.item.detail.is_empty() && !row.item.has_multiline_detail {
        let remaining = available.saturating_sub(text.width() + 2);
        if remaining >= 2 {
            let detail = truncate_to_width(&row.item.detail, remaining);
            println!("{}{}  {}", prefix, text, detail.dimmed());
        } else {
            println!("{}{}", prefix, text);
        }
    } else {
        println!("{}{}", prefix, text);
    }

    // Multi-line details go in an indented block under the item
    if row.item.has_multiline_detail {
        let indent = " ".repeat(prefix.width());
        let detail_width = LINE_WIDTH.saturating_sub(indent.len());
        for line in row.item.detail.lines() {
            println!("{}{}", indent, truncate_to_width(line, detail_width).dimmed());
        }
    }
}

pub(crate) fn print_status(projection: &Projection) {
    let noun = if projection.remaining_count == 1 {
        "item"
    } else {
        "items"
    };
    println!("{} {} left", projection.remaining_count, noun);

    if projection.filter != Filter::All {
        println!("{}", format!("filter: {}", projection.filter.as_str()).dimmed());
    }
    if projection.has_any_completed {
        println!("{}", "Run `todoz clear` to drop completed items.".dimmed());
    }
}

pub(crate) fn print_no_such_index(index: usize) {
    println!("{}", format!("No item at index {}", index).yellow());
}

pub(crate) fn print_unknown_filter(value: &str) {
    println!(
        "{}",
        format!(
            "Ignoring unknown filter '{}' (expected all, active, completed)",
            value
        )
        .yellow()
    );
}

pub(crate) fn print_nothing_to_clear() {
    println!("{}", "No completed items to clear.".dimmed());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
