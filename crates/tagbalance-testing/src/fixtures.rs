//! Markup samples with known check outcomes.

/// A small JSX layout where every tracked tag is closed.
pub const BALANCED_LAYOUT: &str = r#"export default function Layout({ children }) {
  return (
    <div className="min-h-screen">
      <header className="flex">
        <nav>
          <Link to="/dashboard">
            <LayoutDashboard size={18} />
            <span>Dashboard</span>
          </Link>
          <button onClick={logout}>
            <LogOut size={18} />
          </button>
        </nav>
      </header>
      <section>{children}</section>
    </div>
  );
}
"#;

/// `<span>` is never closed: one mismatch at line 3 and `div` left open.
pub const SPAN_NEVER_CLOSED: &str = "<div>\n  <span>text\n</div>\n";

/// A closing tag with nothing open.
pub const LONE_CLOSE: &str = "</div>\n";

/// An opening tag that is never closed.
pub const LONE_OPEN: &str = "<div>\n";

/// Only tags outside the default sets.
pub const UNTRACKED_ONLY: &str = "<main>\n  <article>text</article>\n</main>\n";
