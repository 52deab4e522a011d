#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(feature = "web")]
pub fn clock_now() -> String {
    use js_sys::Date;
    let d = Date::new_0();
    format!(
        "{}:{}:{}",
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32),
        pad2(d.get_seconds() as i32)
    )
}

#[cfg(all(feature = "native", not(feature = "web")))]
pub fn clock_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(not(any(feature = "web", feature = "native")))]
pub fn clock_now() -> String {
    String::new()
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_usd(n: u32) -> String {
    format!("${}", format_thousands(n))
}

/// Fixed decimals, without the `-0.0` that tiny negatives would print.
pub fn format_fixed(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
