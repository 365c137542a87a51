//! Test fixtures - reusable compose documents.

/// One versioned config backed by `./myfile.xml`
pub const SINGLE_CONFIG: &str = r#"version: "3.7"
services:
  app:
    image: registry.example.com/app:latest
    configs:
      - source: my_config
        target: /etc/app/myfile.xml
configs:
  my_config:
    name: my_config.${MYFILE_XML}
    file: ./myfile.xml
"#;

/// Content of `myfile.xml` for [`SINGLE_CONFIG`]
pub const MYFILE_XML: &str = "<settings><debug>false</debug></settings>\n";

/// A config and a secret, one of them pointing at a file that does not exist
pub const CONFIG_AND_MISSING_SECRET: &str = r#"services:
  web:
    image: nginx:alpine
configs:
  nginx:
    name: nginx.${NGINX_CONF}
    file: ./nginx.conf
secrets:
  tls:
    name: tls.${SITE_KEY}
    file: ./certs/site.key
"#;

/// Not valid YAML
pub const MALFORMED: &str = "configs:\n  broken: [unclosed\n";
