use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::errors::{TwigError, TwigResult};

impl Repository {
    pub fn add(&mut self, file: &str) -> TwigResult<()> {
        let path = self.workspace().relative_path(file);

        if !self.workspace().file_exists(&path) {
            return Err(TwigError::FileNotFound);
        }

        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id()?;
        let head = self.head_commit()?;

        if head.snapshot().get(&path) == Some(&blob_id) {
            // back to the committed version: nothing left to stage
            let index = self.index_mut();
            index.unstage(&path);
            index.forget_removal(&path);
        } else {
            self.database().store(&blob)?;
            self.index_mut().add(path, blob_id);
        }

        Ok(())
    }
}
