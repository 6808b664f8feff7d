//! End-to-end exercises of the VFS over the bundled-document backend.

use triefs_kernel::{BundleBackend, LsOptions, TrieVfs, VfsError};

fn backend() -> BundleBackend {
    BundleBackend::new()
        .with_doc("plugin://client/notebooks/welcome.md", "# Welcome\nstart here")
        .with_doc(
            "plugin://plugin-kubectl/notebooks/usage.json",
            "{\"title\": \"kubectl usage\"}",
        )
        .with_title("plugin://client/notebooks/welcome.md", "Welcome Notebook")
}

fn kui_vfs() -> TrieVfs<BundleBackend> {
    TrieVfs::new("/kui", backend()).with_tags(["notebooks"])
}

#[tokio::test]
async fn populate_list_and_read_a_notebook_tree() {
    let vfs = kui_vfs();

    vfs.mkdir("/kui/docs").unwrap();
    vfs.cp(
        &[
            "plugin://client/notebooks/welcome.md",
            "plugin://plugin-kubectl/notebooks/usage.json",
        ],
        "/kui/docs",
    )
    .await
    .unwrap();

    // children only, the directory itself excluded
    let records = vfs.ls(&LsOptions::default(), &["/kui/docs/"]).await.unwrap();
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["usage.json", "welcome.md"]);
    assert!(records.iter().all(|r| r.dirent.is_file));
    assert!(records.iter().all(|r| r.path.starts_with("/kui/docs/")));

    // content resolves through provenance, nothing was copied
    let body = vfs.fslice("/kui/docs/welcome.md", 0, 9).await.unwrap();
    assert_eq!(body, "# Welcome");

    let stat = vfs
        .fstat("/kui/docs/welcome.md", true, false)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stat.data.as_deref(), Some("# Welcome\nstart here"));
    assert_eq!(stat.name_for_display, "Welcome Notebook");
    assert_eq!(stat.dirent.mount.mount_path, "/kui");
    assert_eq!(stat.dirent.mount.tags, vec!["notebooks"]);
}

#[tokio::test]
async fn directories_only_listing_returns_the_directory() {
    let vfs = kui_vfs();
    vfs.mkdir("/kui/docs").unwrap();
    vfs.fwrite("/kui/docs/a.md", "a").unwrap();

    let options = LsOptions {
        directories_only: true,
    };
    let records = vfs.ls(&options, &["/kui/docs"]).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "docs");
    assert!(records[0].dirent.is_directory);
    assert_eq!(records[0].dirent.permissions, "drwxr-xr-x");
}

#[tokio::test]
async fn glob_listing_spans_written_and_copied_leaves() {
    let vfs = kui_vfs();
    vfs.mkdir("/kui/docs").unwrap();
    vfs.cp(&["plugin://client/notebooks/welcome.md"], "/kui/docs")
        .await
        .unwrap();
    vfs.fwrite("/kui/docs/notes.md", "scratch").unwrap();
    vfs.fwrite("/kui/docs/data.json", "{}").unwrap();

    let records = vfs.ls(&LsOptions::default(), &["/kui/docs/*.md"]).await.unwrap();
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["notes.md", "welcome.md"]);
}

#[tokio::test]
async fn write_read_round_trip() {
    let vfs = kui_vfs();
    vfs.fwrite("/kui/scratch.md", "draft one").unwrap();

    let stat = vfs.fstat("/kui/scratch.md", true, false).await.unwrap().unwrap();
    assert_eq!(stat.data.as_deref(), Some("draft one"));

    vfs.fwrite("/kui/scratch.md", "draft two").unwrap();
    assert_eq!(vfs.fslice("/kui/scratch.md", 0, 100).await.unwrap(), "draft two");
}

#[tokio::test]
async fn grepdir_searches_resolved_content() {
    let vfs = kui_vfs();
    vfs.mkdir("/kui/docs").unwrap();
    vfs.cp(
        &[
            "plugin://client/notebooks/welcome.md",
            "plugin://plugin-kubectl/notebooks/usage.json",
        ],
        "/kui/docs",
    )
    .await
    .unwrap();

    let hits = vfs.grepdir(&["/kui/docs/"], "start here").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/kui/docs/welcome.md");

    let none = vfs.grepdir(&["/kui/docs/"], "absent").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn copy_onto_an_explicit_file_path() {
    let vfs = kui_vfs();
    vfs.mkdir("/kui/docs").unwrap();
    vfs.cp(&["plugin://client/notebooks/welcome.md"], "/kui/docs/out.md")
        .await
        .unwrap();

    let stat = vfs.fstat("/kui/docs/out.md", true, false).await.unwrap().unwrap();
    assert_eq!(stat.name, "out.md");
    assert_eq!(stat.data.as_deref(), Some("# Welcome\nstart here"));
}

#[tokio::test]
async fn copy_failures_map_to_errno() {
    let vfs = kui_vfs();

    let err = vfs.cp(&["not-a-source"], "/kui/docs").await.unwrap_err();
    assert!(matches!(err, VfsError::InvalidSource(_)));
    assert_eq!(err.errno(), 22);

    let err = vfs
        .cp(&["plugin://client/notebooks/welcome.md"], "/kui/docs/welcome.md")
        .await
        .unwrap_err();
    assert!(matches!(err, VfsError::MissingDirectory(_)));
    assert_eq!(err.errno(), 2);
}

#[tokio::test]
async fn removal_and_recreation() {
    let vfs = kui_vfs();
    vfs.mkdir("/kui/docs").unwrap();
    vfs.fwrite("/kui/docs/a.md", "a").unwrap();

    vfs.rm("/kui/docs/a.md").unwrap();
    assert!(vfs.fstat("/kui/docs/a.md", false, true).await.unwrap().is_none());
    vfs.rm("/kui/docs/a.md").unwrap();

    vfs.fwrite("/kui/docs/a.md", "again").unwrap();
    assert_eq!(vfs.fslice("/kui/docs/a.md", 0, 5).await.unwrap(), "again");
}

#[tokio::test]
async fn mount_prefix_is_stripped_and_restored() {
    let vfs = kui_vfs();
    vfs.fwrite("/kui/a.md", "a").unwrap();

    // addressing without the mount prefix resolves the same entry
    let stat = vfs.fstat("/a.md", false, false).await.unwrap().unwrap();
    assert_eq!(stat.path, "/kui/a.md");
}
