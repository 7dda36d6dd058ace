//! File content operations: download and upload.

use serde_json::Value;
use tracing::debug;

use crate::api::{DropboxClient, FetchRequest, Params, Transport};
use crate::error::{DropboxError, Result};
use crate::multipart::MultipartBody;
use crate::path::{encode_query_value, resource_path, split_upload_path, upload_directory};
use crate::root::Root;
use crate::upload::UploadSource;

impl<T: Transport> DropboxClient<T> {
    /// Download a file's contents.
    ///
    /// The response body is returned as-is.
    pub async fn get_file(&self, path: &str, root: Option<Root>) -> Result<Vec<u8>> {
        let (root, path) = self.resolve(root, path);
        let uri = self.content_url(&resource_path("files", root, path));
        self.fetch_raw(FetchRequest::get(uri)).await
    }

    /// Upload a file to a remote path.
    ///
    /// The last segment of `remote_path` is the remote filename and the rest
    /// is the target directory; a bare name lands in the root folder. The
    /// target and the payload are validated and the payload read before
    /// anything is sent, so a bad call never reaches the transport.
    ///
    /// # Arguments
    /// * `remote_path` - Remote file path, e.g. `/Docs/report.txt`
    /// * `source` - Local path, open stream or in-memory bytes
    /// * `root` - Root override, `None` for the client default
    ///
    /// # Returns
    /// Metadata of the uploaded file, as returned by the server
    pub async fn put_file(
        &self,
        remote_path: &str,
        source: UploadSource,
        root: Option<Root>,
    ) -> Result<Value> {
        let (directory, filename) = split_upload_path(remote_path);
        if filename.is_empty() {
            return Err(DropboxError::InvalidArgument(format!(
                "Upload path has no file name: {}",
                remote_path
            )));
        }

        let data = source.read_all().await?;
        let request = self.upload_request(directory, filename, &data, root);
        self.fetch_json(request).await
    }

    /// Build the multipart POST for an upload without sending it.
    ///
    /// The filename travels percent-encoded in the query string as well as
    /// in the body so the transport can include it in the request signature.
    pub fn upload_request(
        &self,
        directory: &str,
        filename: &str,
        data: &[u8],
        root: Option<Root>,
    ) -> FetchRequest {
        let root = Root::resolve(root, self.root());
        let directory = upload_directory(directory);
        let uri = format!(
            "{}?file={}",
            self.content_url(&resource_path("files", root, directory)),
            encode_query_value(filename)
        );

        let body = MultipartBody::file(self.boundary().token_for(data), filename, data);
        debug!(
            filename,
            boundary = body.boundary(),
            len = body.len(),
            "built multipart upload body"
        );

        FetchRequest::post(uri)
            .with_header("Content-Type", body.content_type())
            .with_params(Params::Body(body.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::api::{DropboxClient, Method, Params};
    use crate::config::ClientConfig;
    use crate::error::DropboxError;
    use crate::http::HttpTransport;
    use crate::multipart::{Boundary, DEFAULT_BOUNDARY, parse_file_body};
    use crate::root::Root;
    use crate::testing::SpyTransport;
    use crate::upload::{BrokenReader, UploadSource};

    fn client_with_boundary(boundary: Boundary) -> DropboxClient<SpyTransport> {
        let config = ClientConfig {
            boundary,
            ..ClientConfig::new(Root::Sandbox)
        };
        DropboxClient::with_config(SpyTransport::ok(br#"{"bytes": 2}"#), config)
    }

    #[tokio::test]
    async fn test_get_file_returns_raw_bytes() {
        let client = DropboxClient::new(SpyTransport::ok(b"\x00\x01not json"), Root::Sandbox);

        let data = client.get_file("///Docs/report.pdf", None).await.unwrap();
        assert_eq!(data, b"\x00\x01not json");

        let call = client.transport().single_call();
        assert_eq!(
            call.uri,
            "https://api-content.dropbox.com/1/files/sandbox/Docs/report.pdf"
        );
        assert_eq!(call.method, Method::Get);
    }

    #[tokio::test]
    async fn test_get_file_keeps_path_verbatim() {
        let client = DropboxClient::new(SpyTransport::ok(b""), Root::Dropbox);
        client.get_file("/a//b/../c d.txt", None).await.unwrap();
        assert_eq!(
            client.transport().single_call().uri,
            "https://api-content.dropbox.com/1/files/dropbox/a//b/../c d.txt"
        );
    }

    #[test]
    fn test_upload_request_layout() {
        let client = client_with_boundary(Boundary::Fixed("B".to_string()));

        let request = client.upload_request("/Photos/", "a.txt", b"hi", Some(Root::Dropbox));
        assert_eq!(
            request.uri,
            "https://api-content.dropbox.com/1/files/dropbox/Photos?file=a.txt"
        );
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.headers.get("Content-Type").unwrap(),
            "multipart/form-data; boundary=B"
        );
        assert_eq!(
            request.params,
            Params::Body(
                b"--B\r\nContent-Disposition: form-data; name=file; filename=a.txt\r\nContent-type: application/octet-stream\r\n\r\nhi\r\n--B--"
                    .to_vec()
            )
        );
    }

    #[test]
    fn test_upload_to_current_directory() {
        let client = client_with_boundary(Boundary::default());
        let request = client.upload_request(".", "x", b"", None);
        assert_eq!(
            request.uri,
            "https://api-content.dropbox.com/1/files/sandbox/?file=x"
        );
    }

    #[test]
    fn test_random_boundary_matches_header() {
        let client = client_with_boundary(Boundary::Random);
        let request = client.upload_request("d", "x.bin", b"payload", None);

        let header = request.headers.get("Content-Type").unwrap();
        let boundary = header
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();
        assert_ne!(boundary, DEFAULT_BOUNDARY);

        let Params::Body(body) = &request.params else {
            panic!("expected a raw body");
        };
        let (filename, data) = parse_file_body(boundary, body).unwrap();
        assert_eq!(filename, "x.bin");
        assert_eq!(data, b"payload");
    }

    #[test]
    fn test_upload_query_filename_is_encoded() {
        let client = client_with_boundary(Boundary::Fixed("B".to_string()));

        for (name, encoded) in [
            ("a#b.txt", "a%23b.txt"),
            ("x&file=evil.txt", "x%26file%3Devil.txt"),
            ("100%.txt", "100%25.txt"),
        ] {
            let request = client.upload_request("/", name, b"hi", None);
            assert_eq!(
                request.uri,
                format!("https://api-content.dropbox.com/1/files/sandbox/?file={}", encoded)
            );

            let built = HttpTransport::new().build(request).build().unwrap();
            assert_eq!(built.url().fragment(), None);
            let pairs: Vec<(String, String)> = built.url().query_pairs().into_owned().collect();
            assert_eq!(pairs, vec![("file".to_string(), name.to_string())]);
        }

        // The multipart body keeps the name as given.
        let request = client.upload_request("/", "a#b.txt", b"hi", None);
        let Params::Body(body) = &request.params else {
            panic!("expected a raw body");
        };
        let (filename, _) = parse_file_body("B", body).unwrap();
        assert_eq!(filename, "a#b.txt");
    }

    #[tokio::test]
    async fn test_put_file_bare_name_goes_to_root_folder() {
        let client = client_with_boundary(Boundary::default());
        client
            .put_file("x", UploadSource::from_bytes(b"data".to_vec()), None)
            .await
            .unwrap();

        assert_eq!(
            client.transport().single_call().uri,
            "https://api-content.dropbox.com/1/files/sandbox/?file=x"
        );
    }

    #[tokio::test]
    async fn test_put_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.txt");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\xff\xd8jpeg")
            .unwrap();

        let client = client_with_boundary(Boundary::default());
        let result = client
            .put_file("/Docs/r.txt", UploadSource::from_path(&path), None)
            .await
            .unwrap();
        assert_eq!(result["bytes"], 2);

        let call = client.transport().single_call();
        assert_eq!(
            call.uri,
            "https://api-content.dropbox.com/1/files/sandbox/Docs?file=r.txt"
        );
        let Params::Body(body) = &call.params else {
            panic!("expected a raw body");
        };
        let (filename, data) = parse_file_body(DEFAULT_BOUNDARY, body).unwrap();
        assert_eq!(filename, "r.txt");
        assert_eq!(data, b"\xff\xd8jpeg");
    }

    #[tokio::test]
    async fn test_put_file_from_reader() {
        let client = client_with_boundary(Boundary::default());
        let reader = std::io::Cursor::new(b"line one\nline two\n".to_vec());
        client
            .put_file("notes/todo.txt", UploadSource::from_reader(reader), None)
            .await
            .unwrap();

        let call = client.transport().single_call();
        assert!(call.uri.ends_with("/files/sandbox/notes?file=todo.txt"));
        let Params::Body(body) = &call.params else {
            panic!("expected a raw body");
        };
        let (_, data) = parse_file_body(DEFAULT_BOUNDARY, body).unwrap();
        assert_eq!(data, b"line one\nline two\n");
    }

    #[tokio::test]
    async fn test_put_file_rejects_bad_source_before_sending() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_boundary(Boundary::default());

        let err = client
            .put_file("/a.txt", UploadSource::from_path(dir.path()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DropboxError::InvalidArgument(_)));

        let err = client
            .put_file("/a.txt", UploadSource::from_path(dir.path().join("missing")), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DropboxError::InvalidArgument(_)));

        let err = client
            .put_file("/Docs/", UploadSource::from_bytes(b"x".to_vec()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DropboxError::InvalidArgument(_)));

        assert_eq!(client.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_put_file_read_failure_is_not_sent() {
        let client = client_with_boundary(Boundary::default());
        let err = client
            .put_file(
                "/stream.bin",
                UploadSource::from_reader(BrokenReader { sent: false }),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DropboxError::Io(_)));
        assert_eq!(client.transport().call_count(), 0);
    }
}
