mod init_creates_root_commit;
mod init_twice_is_rejected;
