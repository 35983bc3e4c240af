use std::borrow::Cow;

const SPECIAL: [char; 6] = ['\'', '\n', '\r', '|', '[', ']'];

/// Escapes a value for inclusion in a TeamCity service message.
///
/// See <https://www.jetbrains.com/help/teamcity/service-messages.html#Escaped+values>.
/// Returns the input unchanged (borrowed) when it holds no special characters.
pub fn escape(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(SPECIAL) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    for ch in input[first..].chars() {
        match ch {
            '\'' => out.push_str("|'"),
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '|' => out.push_str("||"),
            '[' => out.push_str("|["),
            ']' => out.push_str("|]"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
