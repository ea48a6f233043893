//! End-to-end behaviour of the Thumbor request transformer.
//!
//! Expected URLs are produced by driving the URL builder directly, so these
//! tests pin the transformer's decisions rather than Thumbor's path syntax.

use std::sync::Arc;

use thumbr_core::request::{Request, ResizeStrategy};
use thumbr_core::thumbor::{filter, ImageFormat, Thumbor};
use thumbr_core::transformer::{RequestTransformer, ThumborRequestTransformer};
use url::Url;

const HOST: &str = "http://example.com/";
const KEY: &str = "omgsecretpassword";
const IMAGE: &str = "http://google.com/logo.png";

fn thumbor() -> Thumbor {
    Thumbor::new(HOST).unwrap()
}

fn secure_thumbor() -> Thumbor {
    Thumbor::with_key(HOST, KEY).unwrap()
}

fn transformer() -> ThumborRequestTransformer {
    ThumborRequestTransformer::new(thumbor())
}

fn image_uri() -> Url {
    Url::parse(IMAGE).unwrap()
}

fn resized() -> Arc<Request> {
    Arc::new(Request::builder(image_uri()).resize(50, 50).build().unwrap())
}

fn output_url(request: &Request) -> &str {
    request.uri().expect("transformed request has a URI").as_str()
}

#[test]
fn resource_requests_are_not_transformed() {
    let input = Arc::new(Request::for_resource(12).build().unwrap());
    let output = transformer().transform_request(Arc::clone(&input));
    assert!(Arc::ptr_eq(&input, &output));
}

#[test]
fn resource_requests_are_not_transformed_when_always_transform_is_set() {
    let input = Arc::new(Request::for_resource(12).resize(50, 50).build().unwrap());
    let output = transformer()
        .always_transform(true)
        .transform_request(Arc::clone(&input));
    assert!(Arc::ptr_eq(&input, &output));
}

#[test]
fn non_http_requests_are_not_transformed() {
    for uri in ["file:///sdcard/logo.png", "content://media/external/images/1"] {
        let input = Arc::new(
            Request::builder(Url::parse(uri).unwrap())
                .resize(50, 50)
                .build()
                .unwrap(),
        );
        let output = transformer()
            .always_transform(true)
            .transform_request(Arc::clone(&input));
        assert!(Arc::ptr_eq(&input, &output), "{uri} was transformed");
    }
}

#[test]
fn non_resized_requests_are_not_transformed() {
    let input = Arc::new(Request::builder(image_uri()).build().unwrap());
    let output = transformer().transform_request(Arc::clone(&input));
    assert!(Arc::ptr_eq(&input, &output));
}

#[test]
fn non_resized_requests_are_transformed_when_always_transform_is_set() {
    let input = Arc::new(Request::builder(image_uri()).build().unwrap());
    let output = transformer()
        .always_transform(true)
        .transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());

    let expected = thumbor().build_image(IMAGE).unwrap().to_url().unwrap();
    assert_eq!(output_url(&output), expected);
}

#[test]
fn simple_resize() {
    let input = resized();
    let output = transformer().transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());

    let expected = thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
    assert_eq!(
        expected,
        "http://example.com/unsafe/50x50/http://google.com/logo.png"
    );
}

#[test]
fn https_sources_are_transformed() {
    let uri = Url::parse("https://google.com/logo.png").unwrap();
    let input = Arc::new(Request::builder(uri).resize(50, 50).build().unwrap());
    let output = transformer().transform_request(Arc::clone(&input));
    assert_eq!(
        output_url(&output),
        "http://example.com/unsafe/50x50/https://google.com/logo.png"
    );
}

#[test]
fn simple_resize_uses_webp_when_supported() {
    let input = resized();
    let output = transformer()
        .webp_supported(|| true)
        .transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());

    let expected = thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .filter(filter::format(ImageFormat::Webp))
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
}

#[test]
fn simple_resize_with_center_crop() {
    let input = Arc::new(
        Request::builder(image_uri())
            .resize(50, 50)
            .center_crop()
            .build()
            .unwrap(),
    );
    let output = transformer().transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());
    assert!(!output.center_crop());

    let expected = thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
}

#[test]
fn simple_resize_with_center_inside() {
    let input = Arc::new(
        Request::builder(image_uri())
            .resize(50, 50)
            .center_inside()
            .build()
            .unwrap(),
    );
    let output = transformer().transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());
    assert!(!output.center_inside());

    let expected = thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .fit_in()
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
}

#[test]
fn simple_resize_with_encryption() {
    let input = resized();
    let output = ThumborRequestTransformer::new(secure_thumbor())
        .transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());

    let expected = secure_thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
}

#[test]
fn simple_resize_with_center_inside_and_encryption() {
    let input = Arc::new(
        Request::builder(image_uri())
            .resize(50, 50)
            .center_inside()
            .build()
            .unwrap(),
    );
    let output = ThumborRequestTransformer::new(secure_thumbor())
        .transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());
    assert!(!output.center_inside());

    let expected = secure_thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .fit_in()
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
    assert_eq!(
        expected,
        "http://example.com/yClShieJ862NNPA-qyqaQuUN9tk=/fit-in/50x50/http://google.com/logo.png"
    );
}

#[test]
fn customize_callback_replaces_webp() {
    let input = resized();
    let output = transformer()
        .webp_supported(|| true)
        .customize(|b| {
            b.filter("custom");
        })
        .transform_request(Arc::clone(&input));
    assert!(!Arc::ptr_eq(&input, &output));
    assert!(!output.has_size());

    let expected = thumbor()
        .build_image(IMAGE)
        .unwrap()
        .resize(50, 50)
        .filter("custom")
        .to_url()
        .unwrap();
    assert_eq!(output_url(&output), expected);
}

#[test]
fn input_is_left_untouched() {
    let input = Arc::new(
        Request::builder(image_uri())
            .resize(50, 50)
            .center_crop()
            .build()
            .unwrap(),
    );
    let snapshot = (*input).clone();
    let _ = transformer().transform_request(Arc::clone(&input));
    assert_eq!(*input, snapshot);
    assert_eq!(input.resize_strategy(), ResizeStrategy::CenterCrop);
}

#[test]
fn pass_through_fields_survive() {
    let input = Arc::new(
        Request::builder(image_uri())
            .resize(50, 50)
            .only_scale_down()
            .rotate(180.0)
            .stable_key("logo-50")
            .build()
            .unwrap(),
    );
    let output = transformer().transform_request(input);
    assert_eq!(output.stable_key(), Some("logo-50"));
    assert_eq!(output.rotation_degrees(), 180.0);
    assert!(!output.only_scale_down());
}
