//! Helpers for CLI integration tests: build small `.als` files on disk
//! without shipping binary fixtures.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::Path;

pub fn project_xml(creator: &str, track_name: &str) -> String {
    format!(
        r#"<Ableton Creator="{creator}">
 <LiveSet>
  <Tracks>
   <AudioTrack Id="1">
    <Name><EffectiveName Value="{track_name}"/></Name>
    <Color Value="2"/>
    <DeviceChain>
     <Mixer>
      <Volume><Manual Value="1"/></Volume>
      <Pan><Manual Value="0"/></Pan>
      <SoloSink Value="false"/>
      <Speaker><Manual Value="true"/></Speaker>
     </Mixer>
    </DeviceChain>
   </AudioTrack>
  </Tracks>
  <MasterTrack>
   <DeviceChain>
    <Mixer>
     <Volume><Manual Value="1"/></Volume>
     <Tempo><Manual Value="128"/></Tempo>
     <TimeSignature><Manual><Numerator Value="4"/><Denominator Value="4"/></Manual></TimeSignature>
    </Mixer>
   </DeviceChain>
  </MasterTrack>
 </LiveSet>
</Ableton>"#
    )
}

pub fn write_als(path: &Path, xml: &str) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(xml.as_bytes()).expect("encode");
    let bytes = encoder.finish().expect("finish gzip");
    std::fs::write(path, bytes).expect("write .als fixture");
}
