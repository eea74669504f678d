//! Shared fixtures for integration tests: an in-memory Live Set document and
//! a gzip helper, so tests never depend on binary files on disk.
#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// Gzip a fixture document into `.als` bytes.
pub fn gzip(xml: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(xml.as_bytes())
        .expect("writing to an in-memory encoder cannot fail");
    encoder.finish().expect("gzip encoding should succeed")
}

/// A representative Live Set exercising every extractor: four track kinds,
/// a rack with a renamed macro, arrangement clips out of saved order, five
/// session clips, launch settings, warp/fade/adjustment payloads, locators,
/// scenes, a loop region, a key, and tempo automation on the master.
pub const FULL_PROJECT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Ableton MajorVersion="5" MinorVersion="11.0_433" Creator="Ableton Live 11.3.13" Revision="abc123">
 <LiveSet>
  <Tracks>
   <AudioTrack Id="10">
    <Name><EffectiveName Value="Drums"/></Name>
    <Color Value="2"/>
    <TrackGroupId Value="14"/>
    <Freeze Value="true"/>
    <TrackDelay><Value Value="0"/></TrackDelay>
    <DeviceChain>
     <AudioInputRouting><UpperDisplayString Value="Ext. In"/><LowerDisplayString Value="1"/></AudioInputRouting>
     <AudioOutputRouting><UpperDisplayString Value="Master"/><LowerDisplayString Value=""/></AudioOutputRouting>
     <Mixer>
      <Volume><Manual Value="0.5"/></Volume>
      <Pan><Manual Value="-0.5"/></Pan>
      <SoloSink Value="false"/>
      <Speaker><Manual Value="true"/></Speaker>
      <CrossFadeState Value="1"/>
      <Sends>
       <TrackSendHolder><Send><Manual Value="0.0003162277571"/></Send></TrackSendHolder>
       <TrackSendHolder><Send><Manual Value="1"/></Send></TrackSendHolder>
      </Sends>
     </Mixer>
     <MainSequencer>
      <ClipTimeable><ArrangerAutomation><Events>
       <AudioClip Id="0" Time="8">
        <Name Value="Loop B"/>
        <CurrentEnd Value="16"/>
        <Loop><LoopOn Value="true"/><LoopStart Value="0"/><StartRelative Value="0"/></Loop>
        <Disabled Value="false"/>
        <IsWarped Value="true"/>
        <WarpMode Value="4"/>
        <WarpMarkers><WarpMarker Id="1"/><WarpMarker Id="2"/><WarpMarker Id="3"/></WarpMarkers>
        <SampleRef><FileRef><RelativePath Value="Samples/Imported/break.wav"/><Name Value="break.wav"/></FileRef></SampleRef>
        <SampleVolume Value="0.5"/>
        <PitchCoarse Value="-2"/>
        <PitchFine Value="0"/>
        <Fades><FadeInLength Value="0.25"/><FadeOutLength Value="1.5"/></Fades>
        <GrooveSettings><GrooveId Value="3"/></GrooveSettings>
       </AudioClip>
       <AudioClip Id="1" Time="0">
        <Name Value="Loop A"/>
        <CurrentEnd Value="8"/>
        <Loop><LoopOn Value="false"/><LoopStart Value="0"/><StartRelative Value="0"/></Loop>
        <Disabled Value="false"/>
        <IsWarped Value="false"/>
        <SampleRef><FileRef><RelativePath Value="Samples/kick.wav"/></FileRef></SampleRef>
        <GrooveSettings><GrooveId Value="-1"/></GrooveSettings>
       </AudioClip>
      </Events></ArrangerAutomation></ClipTimeable>
     </MainSequencer>
     <DeviceChain>
      <Devices>
       <AudioEffectGroupDevice Id="1">
        <On><Manual Value="true"/></On>
        <MacroControls.0><Manual Value="0.5"/></MacroControls.0>
        <MacroControls.1><Manual Value="63.5"/></MacroControls.1>
        <MacroDisplayNames.0 Value="Drive"/>
        <MacroDisplayNames.1 Value="Macro 2"/>
       </AudioEffectGroupDevice>
       <Eq8 Id="2">
        <On><Manual Value="false"/></On>
        <LomId Value="0"/>
        <GlobalGain><Manual Value="0.85"/></GlobalGain>
       </Eq8>
      </Devices>
     </DeviceChain>
    </DeviceChain>
   </AudioTrack>
   <MidiTrack Id="11">
    <Name><EffectiveName Value="Keys"/></Name>
    <Color Value="11"/>
    <TrackGroupId Value="-1"/>
    <Freeze Value="false"/>
    <DeviceChain>
     <MidiInputRouting><UpperDisplayString Value="All Ins"/><LowerDisplayString Value=""/></MidiInputRouting>
     <AudioOutputRouting><UpperDisplayString Value="Send Only"/><LowerDisplayString Value=""/></AudioOutputRouting>
     <Mixer>
      <Volume><Manual Value="1"/></Volume>
      <Pan><Manual Value="0"/></Pan>
      <SoloSink Value="false"/>
      <Speaker><Manual Value="false"/></Speaker>
      <CrossFadeState Value="0"/>
     </Mixer>
     <MainSequencer>
      <ClipSlotList>
       <ClipSlot Id="0"><ClipSlot><Value>
        <MidiClip Id="20" Time="0">
         <Name Value="Chords"/>
         <CurrentEnd Value="4"/>
         <Loop><LoopOn Value="true"/><LoopStart Value="4"/><StartRelative Value="0"/></Loop>
         <Disabled Value="false"/>
         <LaunchMode Value="2"/>
         <LaunchQuantisation Value="7"/>
         <FollowAction><FollowActionEnabled Value="true"/><FollowActionA Value="4"/><FollowTime Value="8"/></FollowAction>
         <Ram Value="true"/>
         <Notes><KeyTracks>
          <KeyTrack Id="0"><Notes><MidiNoteEvent Time="0" Duration="0.5" Velocity="100"/><MidiNoteEvent Time="1" Duration="0.5" Velocity="100"/></Notes><MidiKey Value="60"/></KeyTrack>
          <KeyTrack Id="1"><Notes><MidiNoteEvent Time="0" Duration="0.5" Velocity="100"/></Notes><MidiKey Value="67"/></KeyTrack>
          <KeyTrack Id="2"><Notes/><MidiKey Value="72"/></KeyTrack>
         </KeyTracks></Notes>
         <GrooveSettings><GrooveId Value="-1"/></GrooveSettings>
        </MidiClip>
       </Value></ClipSlot></ClipSlot>
       <ClipSlot Id="1"><ClipSlot><Value>
        <MidiClip Id="21" Time="0"><Name Value="Slot 2"/><CurrentEnd Value="4"/><Loop><LoopOn Value="false"/><LoopStart Value="0"/><StartRelative Value="0"/></Loop></MidiClip>
       </Value></ClipSlot></ClipSlot>
       <ClipSlot Id="2"><ClipSlot><Value>
        <MidiClip Id="22" Time="0"><Name Value="Slot 3"/><CurrentEnd Value="4"/><Loop><LoopOn Value="false"/><LoopStart Value="0"/><StartRelative Value="0"/></Loop></MidiClip>
       </Value></ClipSlot></ClipSlot>
       <ClipSlot Id="3"><ClipSlot><Value>
        <MidiClip Id="23" Time="0"><Name Value="Slot 4"/><CurrentEnd Value="4"/><Loop><LoopOn Value="false"/><LoopStart Value="0"/><StartRelative Value="0"/></Loop></MidiClip>
       </Value></ClipSlot></ClipSlot>
       <ClipSlot Id="4"><ClipSlot><Value>
        <MidiClip Id="24" Time="0"><Name Value="Slot 5"/><CurrentEnd Value="4"/><Loop><LoopOn Value="false"/><LoopStart Value="0"/><StartRelative Value="0"/></Loop></MidiClip>
       </Value></ClipSlot></ClipSlot>
      </ClipSlotList>
     </MainSequencer>
     <DeviceChain>
      <Devices>
       <OriginalSimpler Id="4">
        <On><Manual Value="true"/></On>
        <SimplerDevicePresetRef><FileRef><RelativePath Value="Presets/Instruments/Grand Piano.adv"/></FileRef></SimplerDevicePresetRef>
        <Attack><Manual Value="0.01"/></Attack>
        <Release><Manual Value="1.25"/></Release>
        <DryWet><Manual Value="0.75"/></DryWet>
        <FilterFreq><Manual Value="2500"/></FilterFreq>
        <Voices><Manual Value="6"/></Voices>
       </OriginalSimpler>
      </Devices>
     </DeviceChain>
    </DeviceChain>
   </MidiTrack>
   <ReturnTrack Id="12">
    <Name><EffectiveName Value="A-Reverb"/></Name>
    <Color Value="9"/>
    <TrackGroupId Value="-1"/>
    <DeviceChain>
     <AudioOutputRouting><UpperDisplayString Value="Master"/><LowerDisplayString Value=""/></AudioOutputRouting>
     <Mixer>
      <Volume><Manual Value="1"/></Volume>
      <Pan><Manual Value="0"/></Pan>
      <SoloSink Value="false"/>
      <Speaker><Manual Value="true"/></Speaker>
     </Mixer>
     <DeviceChain>
      <Devices>
       <Reverb Id="3">
        <On><Manual Value="true"/></On>
        <DryWet><Manual Value="1"/></DryWet>
        <RoomSize><Manual Value="85.5"/></RoomSize>
       </Reverb>
      </Devices>
     </DeviceChain>
    </DeviceChain>
   </ReturnTrack>
   <GroupTrack Id="14">
    <Name><EffectiveName Value="Stems"/></Name>
    <Color Value="20"/>
    <TrackGroupId Value="-1"/>
    <DeviceChain>
     <Mixer>
      <Volume><Manual Value="1"/></Volume>
      <Pan><Manual Value="0"/></Pan>
      <SoloSink Value="false"/>
      <Speaker><Manual Value="true"/></Speaker>
     </Mixer>
     <DeviceChain><Devices/></DeviceChain>
    </DeviceChain>
   </GroupTrack>
  </Tracks>
  <MasterTrack>
   <Name><EffectiveName Value="Master"/></Name>
   <Color Value="69"/>
   <AutomationEnvelopes><Envelopes>
    <AutomationEnvelope Id="1">
     <EnvelopeTarget><PointeeId Value="8"/></EnvelopeTarget>
     <Automation><Events>
      <FloatEvent Id="1" Time="0" Value="124"/>
      <FloatEvent Id="2" Time="32" Value="128"/>
     </Events></Automation>
    </AutomationEnvelope>
   </Envelopes></AutomationEnvelopes>
   <DeviceChain>
    <Mixer>
     <Volume><Manual Value="0.794"/></Volume>
     <Pan><Manual Value="0"/></Pan>
     <SoloSink Value="false"/>
     <Speaker><Manual Value="true"/></Speaker>
     <Tempo><Manual Value="124"/></Tempo>
     <TimeSignature><Manual><Numerator Value="4"/><Denominator Value="4"/></Manual></TimeSignature>
    </Mixer>
    <Devices>
     <Limiter Id="5">
      <On><Manual Value="true"/></On>
      <Ceiling><Manual Value="-0.3"/></Ceiling>
     </Limiter>
    </Devices>
   </DeviceChain>
  </MasterTrack>
  <Transport><LoopOn Value="true"/><LoopStart Value="8"/><LoopLength Value="16"/></Transport>
  <ScaleInformation><RootNote Value="9"/><Name Value="Minor"/></ScaleInformation>
  <Locators><Locators>
   <Locator Id="0"><Name Value="Drop"/><Time Value="32"/></Locator>
   <Locator Id="1"><Name Value=""/><Time Value="64"/></Locator>
  </Locators></Locators>
  <Scenes>
   <Scene Id="0"><Name Value="Intro"/></Scene>
   <Scene Id="1"><Name Value="Scene 2"/></Scene>
   <Scene Id="2"><Name Value=""/></Scene>
   <Scene Id="3"><Name Value="Outro"/></Scene>
  </Scenes>
 </LiveSet>
</Ableton>
"#;
