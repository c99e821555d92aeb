use urchin_core::XKeysym;

/// Keysym for a key name as it appears in configuration files. Single printable
/// characters map to themselves, the rest go through a small table of named keys.
#[must_use]
pub fn into_keysym(name: &str) -> Option<XKeysym> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_ascii_graphic().then_some(XKeysym::from(c.to_ascii_lowercase()));
    }
    if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
        return (1..=12).contains(&n).then_some(0xffbd + n);
    }
    let keysym = match name {
        "space" => 0x0020,
        "BackSpace" => 0xff08,
        "Tab" => 0xff09,
        "Return" => 0xff0d,
        "Escape" => 0xff1b,
        "Home" => 0xff50,
        "Left" => 0xff51,
        "Up" => 0xff52,
        "Right" => 0xff53,
        "Down" => 0xff54,
        "Prior" | "Page_Up" => 0xff55,
        "Next" | "Page_Down" => 0xff56,
        "End" => 0xff57,
        "Delete" => 0xffff,
        _ => return None,
    };
    Some(keysym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_characters_are_their_own_keysym() {
        assert_eq!(into_keysym("1"), Some(0x31));
        assert_eq!(into_keysym("j"), Some(0x6a));
        assert_eq!(into_keysym("J"), Some(0x6a));
    }

    #[test]
    fn named_keys_are_looked_up() {
        assert_eq!(into_keysym("Return"), Some(0xff0d));
        assert_eq!(into_keysym("space"), Some(0x20));
        assert_eq!(into_keysym("F1"), Some(0xffbe));
        assert_eq!(into_keysym("F12"), Some(0xffc9));
    }

    #[test]
    fn unknown_names_have_no_keysym() {
        assert_eq!(into_keysym("F13"), None);
        assert_eq!(into_keysym("Hyper"), None);
        assert_eq!(into_keysym(""), None);
    }
}
