//! Locally generated error documents shown in place of network content.

/// The user-visible error conditions that replace a view's content.
///
/// Blocked navigations are deliberately absent: they cancel silently and
/// never produce a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPage {
    /// Address-bar input failed grammar validation.
    InvalidAddress,
    /// The underlying fetch of a rewritten target failed.
    LoadFailed,
    /// The load succeeded but the page title signalled a missing resource.
    NotFound,
}

impl ErrorPage {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidAddress => "Invalid domain format",
            Self::LoadFailed => "Page failed to load",
            Self::NotFound => "Page not found",
        }
    }

    /// Renders the full in-memory document for this error.
    ///
    /// The markup carries no `<title>` element: the not-found heuristic probes
    /// document titles for "404", and an error page must never re-trigger it.
    pub fn document(self) -> String {
        let message = self.message();
        format!(
            r#"<html>
  <head>
    <style>
      body {{
        background-color: #111;
        color: white;
        font-family: Arial;
        text-align: center;
        margin-top: 15%;
      }}
      h1 {{
        font-size: 60px;
        color: red;
      }}
      p {{
        font-size: 20px;
        color: #ccc;
      }}
    </style>
  </head>
  <body>
    <h1>404</h1>
    <p>{message}</p>
    <p>The requested site does not exist.</p>
  </body>
</html>
"#
        )
    }
}
