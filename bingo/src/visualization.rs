use crate::Card;

/// Draws the card as a grid, with marked numbers in brackets.
pub fn visualize_card(card: &Card) -> String {
    let width = card.number_range().to_string().len().max(2);
    // Every cell is the number plus a bracket or space on each side
    let cell_width = width + 2;
    let border = "─".repeat(card.size() * (cell_width + 1) + 1);

    let mut result = format!("╭{}╮\n", border);
    for (i, row) in card.rows().iter().enumerate() {
        result += "│ ";
        for (j, number) in row.iter().enumerate() {
            if card.is_marked_at(i, j) {
                result += &format!("[{:0>width$}] ", number, width = width);
            } else {
                result += &format!(" {:0>width$}  ", number, width = width);
            }
        }
        result += "│\n";
    }
    result += &format!("╰{}╯", border);
    result
}

/// Lists the drawn numbers in ascending order.
pub fn visualize_drawn_numbers(drawn: &[u32]) -> String {
    if drawn.is_empty() {
        return String::from("No numbers drawn yet.");
    }
    let mut sorted = drawn.to_vec();
    sorted.sort_unstable();
    let list: Vec<String> = sorted.iter().map(u32::to_string).collect();
    format!("Numbers drawn so far: {}", list.join(", "))
}
