//! HTML fragment builders for the widget.

use mockterm_skin::TerminalOptions;
use mockterm_types::surface::BlockId;

/// Inner markup of a prompt line: coloured `user@host`, the `~$` marker,
/// an input span, and the block cursor.
pub fn prompt_html(options: &TerminalOptions, id: BlockId) -> String {
    let p = &options.colours;
    format!(
        "<span class=\"host\"><span style=\"color: {prefix}\">{user}@{host}</span>\
         :<span style=\"color: {prompt}\">~$</span></span> \
         <span class=\"input\" id=\"input-{id}\"></span><span class=\"cursor\"></span>",
        prefix = p.prefix,
        prompt = p.prompt,
        user = options.user,
        host = options.host,
    )
}

/// Boot banner typed out before the first prompt.
pub fn welcome_banner(options: &TerminalOptions) -> String {
    let mut init = format!(
        "<span style=\"color: {}\">Welcome to {}!</span><br>",
        options.colours.prefix, options.host,
    );
    init.push_str("<br>");
    init.push_str("&gt;&gt; Scanning for data...<br>");
    init.push_str("&gt;&gt; Loading and configuring the terminal...<br>");
    init.push_str("<span style=\"margin-left:28px\">==================================</span><br>");
    init.push_str("&gt;&gt; Done!<br>");
    init.push_str("<br>");
    init.push_str("Run <i>help</i> to see available commands.<br>");
    init
}

/// Logout banner. With `goodbye` a farewell line (navigation follows);
/// without, a reload action to start a new session.
pub fn logout_banner(options: &TerminalOptions, goodbye: bool) -> String {
    let mut out = String::from("<br>");
    out.push_str("&gt;&gt; Logged out<br>");
    out.push_str(&format!("&gt;&gt; Closed connection to {}<br>", options.host));
    if goodbye {
        out.push_str("Goodbye. Thank you for visiting.");
    } else {
        out.push_str("To start a new session, <button class=\"exit\">reload the terminal</button>.");
    }
    out
}

/// Assemble the whole page: style block, welcome region, prompt/output
/// paragraphs, logout region.
pub fn page(options: &TerminalOptions, init: &str, blocks: &str, typed: &str) -> String {
    format!(
        "<style type=\"text/css\">{css}</style>\
         <div class=\"init\">{init}</div>\
         <div class=\"terminal\">{blocks}</div>\
         <div class=\"typed\">{typed}</div>",
        css = options.stylesheet(),
    )
}

/// Reduce an HTML fragment to console text: `<br>` and paragraph ends
/// become newlines, other tags are dropped, and the predefined entities
/// are unescaped.
pub fn to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(i) = rest.find('<') {
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        match rest.find('>') {
            Some(end) => {
                let tag = rest[1..end].to_ascii_lowercase();
                if tag.starts_with("br") || tag == "/p" {
                    out.push('\n');
                }
                rest = &rest[end + 1..];
            },
            None => {
                rest = "";
            },
        }
    }
    out.push_str(rest);
    unescape(&out)
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
