use crate::commands::{CmdMessage, CmdResult};
use crate::model::Paper;
use crate::paths::PdfLayout;

/// File paths of the papers in `view`, in view order.
pub fn run(papers: &[Paper], view: &[usize], layout: &PdfLayout) -> CmdResult {
    let paths: Vec<String> = view.iter().map(|&i| layout.resolve(&papers[i])).collect();
    let mut result = CmdResult::default();
    if paths.is_empty() {
        result.add_message(CmdMessage::warning("No papers match your search."));
    }
    result.with_paper_paths(paths)
}
