/// Groups digits by thousands: `1234567` becomes `1,234,567`.
pub fn format_number(number: usize) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Converts a DIMACS vertex id (1-based) to an internal index.
pub fn parse_vertex_id(text: &str, num_vertices: usize) -> Result<usize, String> {
    let id: usize = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a vertex id", text.trim()))?;

    if id == 0 || id > num_vertices {
        return Err(format!("vertex {} is outside 1..={}", id, num_vertices));
    }

    Ok(id - 1)
}

pub fn display_id(vertex: usize) -> usize {
    vertex + 1
}
