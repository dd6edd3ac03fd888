use crate::areas::repository::Repository;
use crate::errors::{TwigError, TwigResult};

impl Repository {
    pub fn rm(&mut self, file: &str) -> TwigResult<()> {
        let path = self.workspace().relative_path(file);
        let is_tracked = self.head_commit()?.snapshot().contains(&path);

        if is_tracked {
            self.workspace().remove_file(&path)?;
            self.index_mut().mark_removed(path.clone());
        } else if self.index().is_staged(&path) {
            self.index_mut().unstage(&path);
        } else {
            return Err(TwigError::NothingToRemove);
        }

        self.index_mut().mark_untracked(path);

        Ok(())
    }
}
