//! HTML rendering of the conformance matrix

use sigtest_types::ConformanceMatrix;

/// Placeholder token the rendered table replaces in the page template.
pub const REPORT_PLACEHOLDER: &str = "%%%REPORTS%%%";

/// Render the matrix as an HTML table fragment.
///
/// One header row (the "Test" column plus one column per driver) and one row
/// per authoritative test title; each cell carries the status as its CSS
/// class and the status mark as its text.
pub fn render_table(matrix: &ConformanceMatrix) -> String {
    let mut table = String::from("<table class=\"simple\">\n  <thead>\n    <th width=\"80%\">Test</th>\n");

    for driver in matrix.drivers() {
        table.push_str(&format!("    <th>{driver}</th>\n"));
    }
    table.push_str("  </thead>\n  <tbody>\n");

    for test in matrix.tests() {
        table.push_str(&format!("    <tr>\n      <td>{test}</td>\n"));
        for driver in matrix.drivers() {
            let status = matrix.status(driver, test);
            table.push_str(&format!(
                "      <td class=\"{}\">{}</td>\n",
                status.css_class(),
                status.mark()
            ));
        }
        table.push_str("    </tr>\n");
    }

    table.push_str("  </tbody>\n</table>\n");
    table
}

/// Substitute the rendered table into a page template, replacing the
/// [`REPORT_PLACEHOLDER`] token exactly once.
pub fn render_report(matrix: &ConformanceMatrix, template: &str) -> String {
    template.replacen(REPORT_PLACEHOLDER, &render_table(matrix), 1)
}
