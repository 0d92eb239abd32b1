use common::model::file::SelectedFile;
use web_sys::HtmlInputElement;

/// A file picked through the image input.
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile(web_sys::File);

impl PickedFile {
    pub fn as_file(&self) -> &web_sys::File {
        &self.0
    }
}

impl SelectedFile for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// Every file currently selected in `input`, in selection order.
pub fn picked_files(input: &HtmlInputElement) -> Vec<PickedFile> {
    match input.files() {
        Some(list) => (0..list.length())
            .filter_map(|index| list.get(index))
            .map(PickedFile)
            .collect(),
        None => Vec::new(),
    }
}
