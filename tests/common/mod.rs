#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use saltpack::transport::{Body, Request, Response, Transport};
use saltpack::utils::local_name;
use saltpack::{Config, ProposalClient, Result};
use xmltree::{Element, XMLNode};
use zip::ZipArchive;
use zip::write::FileOptions;

pub const BASE_URL: &str = "http://whatever.saao.ac.za";

pub fn uri(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

type Responder = Box<dyn Fn(&Request) -> Response>;

/// Transport that records every request and answers from a closure.
pub struct MockTransport {
    requests: RefCell<Vec<Request>>,
    responder: Responder,
}

impl MockTransport {
    pub fn ok() -> Self {
        Self::with(|_| Response::from_bytes(200, "some content"))
    }

    pub fn with(responder: impl Fn(&Request) -> Response + 'static) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    pub fn status(status: u16, body: &'static str) -> Self {
        Self::with(move |_| Response::from_bytes(status, body))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn last(&self) -> Request {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("a request was sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let response = (self.responder)(&request);
        self.requests.borrow_mut().push(request);
        Ok(response)
    }
}

pub fn client(transport: &MockTransport) -> ProposalClient<&MockTransport> {
    ProposalClient::new(Config::new(BASE_URL).unwrap(), transport)
}

/// Uploaded multipart payload of `request`.
pub fn uploaded_bytes(request: &Request) -> Vec<u8> {
    match &request.body {
        Body::Multipart(part) => {
            assert_eq!(part.field, "file");
            part.bytes.clone()
        }
        other => panic!("expected a file upload, got {other:?}"),
    }
}

pub fn dummy_zip(path: &Path, content: &str, name: &str) {
    fs::write(path, dummy_zip_bytes(content, name)).unwrap();
}

pub fn dummy_zip_bytes(content: &str, name: &str) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> = FileOptions::default();
    zip.start_file(name, options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

pub fn open_zip(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

pub fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut content = Vec::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_end(&mut content)
        .unwrap();
    content
}

pub fn entry_names(archive: &ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
    archive.file_names().map(str::to_string).collect()
}

/// Trimmed text of every `Path` element (any namespace) in document order.
pub fn path_texts(xml: &[u8]) -> Vec<String> {
    fn walk(element: &Element, out: &mut Vec<String>) {
        if local_name(&element.name) == "Path" {
            out.push(element.get_text().unwrap_or_default().trim().to_string());
        }
        for child in &element.children {
            if let XMLNode::Element(child) = child {
                walk(child, out);
            }
        }
    }

    let root = Element::parse(xml).unwrap();
    let mut out = Vec::new();
    walk(&root, &mut out);
    out
}
